use board_server::board::SortConfig;
use board_server::utils::init_logger_with_file;
use board_server::{BoardState, Config};
use shared::models::{ReservationCreate, TableId};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_filter), config.log_dir.as_deref());

    info!("board server starting");

    let state = BoardState::in_memory(config).await?;
    seed_demo_data(&state).await?;

    let date = state.config.default_date.clone();
    let rows = state.board.rows(&date, SortConfig::default(), "");
    for row in &rows {
        if let Some(res) = &row.reservation {
            info!(
                table = %row.table,
                customer = %res.customer_name,
                people = res.people_count(),
                "reservation"
            );
        }
    }

    let stats = state.board.stats(&date);
    info!(
        tables = stats.table_count,
        people = stats.total_people(),
        adults = stats.adults,
        children = stats.children,
        "board summary for {date}"
    );

    let daily = state.menus.daily_menu(&date);
    info!(menu = daily.items.join(" / "), "daily menu");

    Ok(())
}

async fn seed_demo_data(state: &BoardState) -> anyhow::Result<()> {
    let date = state.config.default_date.clone();
    let entries = [
        (TableId::Numbered(3), "Ahmet Yılmaz", 2u32, 1u32),
        (TableId::Numbered(12), "Ayşe Demir", 4, 0),
        (TableId::Ihlara, "Çelik Ailesi", 12, 4),
    ];
    for (table, name, adults, children) in entries {
        state
            .board
            .create(ReservationCreate {
                date: date.clone(),
                table,
                customer_name: name.into(),
                phone: "5321234567".into(),
                adult_count: adults,
                child_count: children,
                note: String::new(),
                orders: vec![],
                recorded_by: "KENAN".into(),
            })
            .await?;
    }
    Ok(())
}
