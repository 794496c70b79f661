//! Two-step reservation wizard
//!
//! Explicit state machine behind the create/edit dialog: guest info first,
//! order entry second. `advance` and `finish` are the only transitions and
//! both run the same field validation, so a draft can never reach the
//! order step or the store with missing required fields.

use crate::utils::validation::{normalize_phone_input, validate_phone};
use shared::models::{MenuItem, OrderLine, Reservation, ReservationCreate, TableId};
use shared::util::parse_price;
use shared::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;

/// Wizard step. Order entry is only reachable through a validated advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    GuestInfo,
    OrderEntry,
}

/// Editable draft fields, mirroring the dialog inputs.
#[derive(Debug, Clone)]
pub struct DraftFields {
    pub customer_name: String,
    pub adult_count: u32,
    pub child_count: u32,
    pub phone: String,
    pub table: Option<TableId>,
    pub note: String,
    pub orders: Vec<OrderLine>,
    pub recorded_by: String,
}

impl Default for DraftFields {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            adult_count: 2,
            child_count: 0,
            phone: String::new(),
            table: None,
            note: String::new(),
            orders: Vec::new(),
            recorded_by: String::new(),
        }
    }
}

/// The wizard: current step plus the draft being edited.
#[derive(Debug, Clone, Default)]
pub struct ReservationWizard {
    pub step: WizardStep,
    pub fields: DraftFields,
    /// Set when editing an existing reservation.
    pub editing_id: Option<String>,
}

impl ReservationWizard {
    /// Fresh wizard for a new reservation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wizard pre-filled from an existing reservation, for editing.
    pub fn for_edit(res: &Reservation) -> Self {
        Self {
            step: WizardStep::GuestInfo,
            fields: DraftFields {
                customer_name: res.customer_name.clone(),
                adult_count: res.adult_count,
                child_count: res.child_count,
                phone: res.phone.clone(),
                table: Some(res.table),
                note: res.note.clone(),
                orders: res.orders.clone(),
                recorded_by: res.recorded_by.clone(),
            },
            editing_id: Some(res.id.clone()),
        }
    }

    /// Set the phone field from raw input: digits only, one leading trunk
    /// zero stripped, capped at ten digits.
    pub fn set_phone(&mut self, input: &str) {
        self.fields.phone = normalize_phone_input(input);
    }

    /// Validate the guest-info fields. All advisory, Turkish messages.
    fn validate(&self) -> AppResult<()> {
        let f = &self.fields;
        if f.customer_name.trim().is_empty()
            || f.phone.is_empty()
            || f.table.is_none()
            || f.adult_count == 0
        {
            return Err(AppError::validation(
                "Lütfen zorunlu alanları doldurunuz:\n- Misafir Ad Soyad\n- Yetişkin Sayısı\n- Masa Seçimi\n- İletişim Telefonu",
            ));
        }
        validate_phone(&f.phone)?;
        if f.recorded_by.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Lütfen rezervasyonu kayıt alan personeli seçiniz.",
            ));
        }
        Ok(())
    }

    /// Move from guest info to order entry. No-op if already there.
    pub fn advance(&mut self) -> AppResult<()> {
        self.validate()?;
        self.step = WizardStep::OrderEntry;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = WizardStep::GuestInfo;
    }

    // ==================== Order entry ====================

    /// Add one of a menu item: bump quantity if already ordered, otherwise
    /// append a new line with quantity 1.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.fields.orders.iter_mut().find(|o| o.name == item.name) {
            line.quantity += 1;
        } else {
            self.fields.orders.push(OrderLine {
                name: item.name.clone(),
                price: item.price.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove one of a named item: decrement, or drop the line at one.
    pub fn remove_item(&mut self, name: &str) {
        if let Some(pos) = self.fields.orders.iter().position(|o| o.name == name) {
            if self.fields.orders[pos].quantity > 1 {
                self.fields.orders[pos].quantity -= 1;
            } else {
                self.fields.orders.remove(pos);
            }
        }
    }

    /// Set a line's quantity directly. Zero is allowed while editing; the
    /// line is dropped at save time instead.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) {
        if let Some(line) = self.fields.orders.iter_mut().find(|o| o.name == name) {
            line.quantity = quantity;
        }
    }

    /// Running order total from the comma-decimal price labels.
    pub fn total(&self) -> Decimal {
        self.fields
            .orders
            .iter()
            .filter_map(|o| parse_price(&o.price).map(|p| p * Decimal::from(o.quantity)))
            .sum()
    }

    /// Re-validate and produce the save payload, dropping zero-quantity
    /// order lines.
    pub fn finish(&self, date: &str) -> AppResult<ReservationCreate> {
        self.validate()?;
        let f = &self.fields;
        Ok(ReservationCreate {
            date: date.to_string(),
            table: f.table.ok_or_else(|| AppError::required("tableNumber"))?,
            customer_name: f.customer_name.clone(),
            phone: f.phone.clone(),
            adult_count: f.adult_count,
            child_count: f.child_count,
            note: f.note.clone(),
            orders: f
                .orders
                .iter()
                .filter(|o| o.quantity > 0)
                .cloned()
                .collect(),
            recorded_by: f.recorded_by.clone(),
        })
    }
}
