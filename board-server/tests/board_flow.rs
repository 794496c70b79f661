//! End-to-end flow over the in-memory store: wizard to saved reservation,
//! board views, printing, table change and the confirmation message.

use board_server::board::{SortConfig, SortDirection, SortKey};
use board_server::messaging;
use board_server::printing::{card_pages, list_pages};
use board_server::wizard::ReservationWizard;
use board_server::{BoardState, Config};
use chrono::NaiveDate;
use shared::models::{ReservationCreate, TableId};

const DATE: &str = "2026-02-19";

async fn state() -> BoardState {
    BoardState::in_memory(Config::default()).await.unwrap()
}

async fn seed(state: &BoardState, table: TableId, name: &str, adults: u32) {
    state
        .board
        .create(ReservationCreate {
            date: DATE.into(),
            table,
            customer_name: name.into(),
            phone: "5321234567".into(),
            adult_count: adults,
            child_count: 0,
            note: String::new(),
            orders: vec![],
            recorded_by: "HİMMET".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn wizard_to_board_flow() {
    let state = state().await;

    let mut wizard = ReservationWizard::new();
    wizard.fields.customer_name = "mehmet çınar".into();
    wizard.set_phone("0532 987 65 43 21");
    wizard.fields.table = Some(TableId::Numbered(9));
    wizard.fields.recorded_by = "SERDAR".into();
    wizard.advance().unwrap();

    let menus = state.menus.categorized();
    let menu_item = menus.categories[0].items[0].clone();
    wizard.add_item(&menu_item);
    wizard.add_item(&menu_item);

    let payload = wizard.finish(DATE).unwrap();
    let saved = state.board.create(payload).await.unwrap();
    assert_eq!(saved.table, TableId::Numbered(9));
    assert_eq!(saved.orders[0].quantity, 2);

    let rows = state.board.rows(DATE, SortConfig::default(), "");
    assert_eq!(rows.len(), 41);
    let occupied: Vec<_> = rows.iter().filter(|r| r.occupied()).collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].table, TableId::Numbered(9));
}

#[tokio::test]
async fn board_sorting_and_search() {
    let state = state().await;
    seed(&state, TableId::Numbered(5), "Zeynep Kaya", 2).await;
    seed(&state, TableId::Numbered(2), "Ali Vural", 6).await;
    seed(&state, TableId::Ihlara, "Okul Grubu", 30).await;

    // special table pinned first regardless of direction
    let sort = SortConfig {
        key: SortKey::PeopleCount,
        direction: SortDirection::Desc,
    };
    let rows = state.board.rows(DATE, sort, "");
    assert_eq!(rows[0].table, TableId::Ihlara);
    assert_eq!(rows[1].table, TableId::Numbered(2));
    assert_eq!(rows[2].table, TableId::Numbered(5));

    // Turkish case-folded search keeps the special row
    let rows = state.board.rows(DATE, SortConfig::default(), "ZEYNEP");
    let occupied: Vec<_> = rows.iter().filter(|r| r.occupied()).collect();
    assert_eq!(occupied.len(), 2);
    assert!(occupied.iter().any(|r| r.table == TableId::Ihlara));
    assert!(occupied.iter().any(|r| r.table == TableId::Numbered(5)));

    // toggle flips direction on the active key only
    let toggled = sort.toggle(SortKey::PeopleCount);
    assert_eq!(toggled.direction, SortDirection::Asc);
    let switched = sort.toggle(SortKey::CustomerName);
    assert_eq!(switched.key, SortKey::CustomerName);
    assert_eq!(switched.direction, SortDirection::Asc);
}

#[tokio::test]
async fn printing_and_export() {
    let state = state().await;
    for n in 1..=18u8 {
        seed(&state, TableId::Numbered(n), &format!("Misafir {n}"), 2).await;
    }

    let printed = state
        .board
        .print_reservations(DATE, SortConfig::default(), "");
    assert_eq!(printed.len(), 18);

    let now = NaiveDate::from_ymd_opt(2026, 2, 19)
        .unwrap()
        .and_hms_opt(17, 0, 0)
        .unwrap();
    let stats = state.board.stats(DATE);
    let pages = list_pages(DATE, &printed, &stats, now);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].rows.len(), 16);
    assert!(pages[0].stats.is_some());
    assert!(pages[1].stats.is_none());

    let cards = card_pages(&printed);
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].cards.len(), 8);

    let export = state
        .export
        .snapshot(DATE, SortConfig::default(), "", now)
        .unwrap();
    assert_eq!(export.file_name, "Rezervasyon_Listesi_2026-02-19.png");
    assert_eq!(export.page.number, 1);
}

#[tokio::test]
async fn table_change_swaps_occupied_tables() {
    let state = state().await;
    seed(&state, TableId::Numbered(1), "Birinci", 2).await;
    seed(&state, TableId::Numbered(2), "İkinci", 2).await;

    state
        .tables
        .change_table(DATE, TableId::Numbered(1), TableId::Numbered(2))
        .await
        .unwrap();

    let snapshot = state.board.snapshot();
    let first = snapshot.iter().find(|r| r.customer_name == "Birinci").unwrap();
    let second = snapshot.iter().find(|r| r.customer_name == "İkinci").unwrap();
    assert_eq!(first.table, TableId::Numbered(2));
    assert_eq!(second.table, TableId::Numbered(1));
}

#[tokio::test]
async fn confirmation_message_from_saved_reservation() {
    let state = state().await;
    seed(&state, TableId::Numbered(4), "fatma nur şahin", 3).await;

    let res = state.board.snapshot().into_iter().next().unwrap();
    let menus = state.menus.categorized();
    let msg = messaging::confirmation(&res, &menus).unwrap();
    assert!(msg.body.starts_with("Sayın Fatma Nur ŞAHİN,"));
    assert!(msg.body.contains("19.02.2026"));
    assert!(msg.link().starts_with("https://api.whatsapp.com/send?phone=5321234567"));
}
