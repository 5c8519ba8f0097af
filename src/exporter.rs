use std::fs;

use anyhow::{Result, anyhow};
use sqlx::sqlite::SqlitePool;

use crate::config::ExportConfig;
use crate::db::sql;
use crate::file_writer;

pub async fn run(config: &ExportConfig) -> Result<()> {
    if !config.db_path.exists() {
        return Err(anyhow!("База данных не найдена: {}", config.db_path.display()));
    }

    let db_url = format!("sqlite://{}", config.db_path.display());
    let pool = sql::get_sqlite_pool(&db_url).await?;
    println!("Подключено к SQLite.");

    // Пул закрывается на любом пути выхода, в том числе при ошибке экспорта.
    let result = export_all(&pool, config).await;
    pool.close().await;
    result
}

pub async fn export_all(pool: &SqlitePool, config: &ExportConfig) -> Result<()> {
    for target in &config.targets {
        if !sql::table_exists(pool, &target.table).await? {
            println!(
                "Пропуск: таблица {} не найдена в {}",
                target.table,
                config.db_path.display()
            );
            continue;
        }

        let data = sql::extract_table(pool, &target.table).await?;
        println!("Успешно извлечено {} строк.", data.rows.len());

        if let Some(parent) = target.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        file_writer::write_table(&data, &target.table, &target.output_path)?;
        println!(
            "Таблица {} экспортирована -> {}",
            target.table,
            target.output_path.display()
        );
    }

    println!("Экспорт всех доступных таблиц завершён.");
    Ok(())
}
