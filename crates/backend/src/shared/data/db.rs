use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Открывает SQLite-базу и создаёт недостающие таблицы.
///
/// Путь берётся из конфигурации; None означает путь по умолчанию.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/orders.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // a001_order
    let check_order_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='a001_order';
    "#;
    let order_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_order_table.to_string(),
        ))
        .await?;

    if order_table_exists.is_empty() {
        tracing::info!("Creating a001_order table");
        let create_order_table_sql = r#"
            CREATE TABLE a001_order (
                order_id INTEGER PRIMARY KEY AUTOINCREMENT,
                items TEXT NOT NULL,
                local_d TEXT NOT NULL,
                local_t TEXT NOT NULL,
                quantity INTEGER NOT NULL DEFAULT 0,
                on_hand INTEGER NOT NULL DEFAULT 0
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_order_table_sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
