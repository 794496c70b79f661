//! WhatsApp message formatting
//!
//! Pure builders: reservation (plus the categorized menu for order
//! grouping) in, deep-link-ready message out. No delivery tracking; the
//! link opens the external chat application and that is the end of it.

use crate::utils::time::{format_date_tr, weekday_name_tr};
use crate::utils::validation::is_internal_extension;
use shared::models::{CategorizedMenus, OrderLine, Reservation};
use shared::turkish;
use shared::util::digits_only;
use shared::{AppError, AppResult, ErrorCode};

/// Venue signature block, closing every outbound message.
const SIGNATURE: &str = "Uluırmak Turizm MTAL\nUygulama Oteli";

/// Fixed public menu link used by the standalone menu message.
const MENU_URL: &str = "https://www.kisa.link/YrRiq";

/// A ready-to-send WhatsApp message: recipient digits and plain body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppMessage {
    /// Recipient digits as they go into the deep link, country code
    /// included when the trunk prefix was rewritten.
    pub phone: String,
    pub body: String,
}

impl WhatsAppMessage {
    /// Deep link carrying the URL-encoded body.
    pub fn link(&self) -> String {
        format!(
            "https://api.whatsapp.com/send?phone={}&text={}",
            self.phone,
            urlencoding::encode(&self.body)
        )
    }
}

/// Customer name for the salutation: every word first-letter-uppercase,
/// the last word (the surname) fully uppercase, Turkish rules throughout.
/// `ahmet yılmaz kaya` → `Ahmet Yılmaz KAYA`.
pub fn format_customer_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == last {
                turkish::to_uppercase(word)
            } else {
                turkish::capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Order lines re-ordered by their owning category's position in the
/// fixed priority list; lines whose category cannot be resolved sort
/// last, stable among ties.
pub fn sort_orders_by_category(
    orders: &[OrderLine],
    menus: &CategorizedMenus,
) -> Vec<OrderLine> {
    let mut sorted = orders.to_vec();
    sorted.sort_by_key(|o| menus.category_rank_of_item(&o.name).unwrap_or(999));
    sorted
}

/// Build the reservation confirmation message.
///
/// 3-digit internal extensions cannot receive external chat messages and
/// are rejected with a typed error the caller presents as an advisory.
pub fn confirmation(
    res: &Reservation,
    menus: &CategorizedMenus,
) -> AppResult<WhatsAppMessage> {
    let mut phone = digits_only(&res.phone);
    if is_internal_extension(&phone) {
        return Err(AppError::new(ErrorCode::InternalExtension));
    }

    let date_label = format_date_tr(&res.date);
    let day_name = weekday_name_tr(&res.date).unwrap_or_default();

    let mut people_info = format!("{} Kişi", res.adult_count);
    if res.child_count > 0 {
        people_info.push_str(&format!("\n{} Çocuk", res.child_count));
    }

    let mut order_text = String::new();
    if !res.orders.is_empty() {
        let lines: Vec<String> = sort_orders_by_category(&res.orders, menus)
            .iter()
            .map(|o| format!("* {} ({} Adet)", turkish::title_case(&o.name), o.quantity))
            .collect();
        order_text = format!("\n\nSipariş Detayları:\n{}", lines.join("\n"));
    }

    let body = format!(
        "Sayın {},\n\n{}\n{}\n\nGelveri\n{}{}\n\n\
         İftar yemeği rezervasyonunuz oluşturulmuştur.\n\n\
         İlgi ve nezaketiniz için teşekkür eder, iyi günler dileriz.\n\
         Saygılarımızla.\n\n{}",
        format_customer_name(&res.customer_name),
        date_label,
        day_name,
        people_info,
        order_text,
        SIGNATURE,
    );

    // only the leading trunk 0 is rewritten; trunk-less numbers pass
    // through and the link target applies the country code itself
    if let Some(rest) = phone.strip_prefix('0') {
        phone = format!("90{rest}");
    }

    Ok(WhatsAppMessage { phone, body })
}

/// Build the standalone menu-link message for an arbitrary phone number.
pub fn menu_link(phone_input: &str) -> AppResult<WhatsAppMessage> {
    if phone_input.len() < 10 {
        return Err(AppError::new(ErrorCode::InvalidRecipient));
    }
    let mut phone = digits_only(phone_input);
    if let Some(rest) = phone.strip_prefix('0') {
        phone = rest.to_string();
    }
    let phone = format!("90{phone}");

    let body = format!(
        "Merhaba, menülerimize aşağıda bulunan linkten ulaşabilirsiniz.\n\
         Rezervasyon ve sipariş işlemleri için lütfen telefon numaralarımızdan bizleri arayınız.\n\n\
         Menümüz:\n{MENU_URL}\n\n\
         İlgi ve nezaketiniz için teşekkür eder, iyi günler dileriz.\n\n\
         Saygılarımızla.\n\n{SIGNATURE}"
    );

    Ok(WhatsAppMessage { phone, body })
}
