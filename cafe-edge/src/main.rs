use cafe_edge::floor::occupied_minutes;
use cafe_edge::utils::{Clock, SystemClock};
use cafe_edge::{ServerState, print_banner, setup_environment};
use shared::models::{FLOORS, TableStatus};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment()?;

    print_banner();
    tracing::info!("☕ Cafe Edge starting...");

    // 2. 初始化服务状态
    let state = ServerState::initialize(&config)?;

    match state.sessions().load_current_user()? {
        Some(user) => tracing::info!(user = %user.name, role = user.role.label(), "Session restored"),
        None => tracing::info!("No user logged in"),
    }

    // 3. 楼面概览
    let now = SystemClock.now_millis();
    for floor in FLOORS {
        let dashboard = state.floor().dashboard(floor);
        tracing::info!(floor, halls = dashboard.halls.len(), "Floor overview");
        for hall in &dashboard.halls {
            let busy = hall
                .tables
                .iter()
                .filter(|t| t.status == TableStatus::Occupied)
                .count();
            tracing::info!(hall = %hall.name, tables = hall.table_count(), occupied = busy, "Hall");
            for table in &hall.tables {
                if let Some(minutes) = occupied_minutes(table, now) {
                    tracing::debug!(table = %table.name, minutes, "Occupied");
                }
            }
        }
    }

    let counts = state.floor().status_counts();
    for status in TableStatus::ALL {
        tracing::info!(status = status.label(), count = counts.get(status), "Status");
    }
    tracing::info!(total = counts.total(), "Tables");

    Ok(())
}
