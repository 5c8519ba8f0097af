use anyhow::{Result, anyhow};
use sqlx::{Column, Executor, Row, Statement, sqlite::{SqlitePool, SqliteRow}};

use crate::db::{CellValue, TableData};

pub async fn get_sqlite_pool(db_url: &str) -> Result<SqlitePool> {
    println!("Подключение к SQLite...");
    SqlitePool::connect(db_url).await.map_err(|e| anyhow!("Ошибка подключения к SQLite: {}", e))
}

pub async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let found = sqlx::query("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
        .bind(table)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn extract_table(pool: &SqlitePool, table: &str) -> Result<TableData> {
    let query = format!("SELECT * FROM \"{}\"", table);
    println!("Выполнение SQL запроса: {}", query);

    // Заголовки берутся из метаданных запроса, а не из первой строки,
    // иначе пустая таблица осталась бы без заголовков.
    let stmt = pool.prepare(&query).await?;
    let headers: Vec<String> = stmt.columns().iter().map(|c| c.name().to_string()).collect();

    let rows = stmt.query().fetch_all(pool).await?;
    if rows.is_empty() {
        println!("Запрос вернул пустой результат.");
    }

    let mut data_rows: Vec<Vec<CellValue>> = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut row_values: Vec<CellValue> = Vec::with_capacity(headers.len());
        for i in 0..headers.len() {
            row_values.push(decode_cell(row, i));
        }
        data_rows.push(row_values);
    }

    Ok(TableData { headers, rows: data_rows })
}

fn decode_cell(row: &SqliteRow, i: usize) -> CellValue {
    match row.try_get::<Option<i64>, _>(i) {
        Ok(Some(n)) => CellValue::Int(n),
        Ok(None) => CellValue::Null,
        Err(_) => match row.try_get::<Option<f64>, _>(i) {
            Ok(Some(f)) => CellValue::Real(f),
            Ok(None) => CellValue::Null,
            Err(_) => match row.try_get::<Option<String>, _>(i) {
                Ok(Some(s)) => CellValue::Text(s),
                Ok(None) => CellValue::Null,
                Err(_) => match row.try_get::<Option<bool>, _>(i) {
                    Ok(Some(b)) => CellValue::Bool(b),
                    Ok(None) => CellValue::Null,
                    Err(_) => match row.try_get::<Option<sqlx::types::chrono::NaiveDateTime>, _>(i) {
                        Ok(Some(d)) => CellValue::DateTime(d),
                        Ok(None) => CellValue::Null,
                        Err(_) => match row.try_get::<Option<Vec<u8>>, _>(i) {
                            Ok(Some(b)) => CellValue::Blob(b),
                            Ok(None) => CellValue::Null,
                            Err(_) => {
                                eprintln!("Предупреждение: Не удалось извлечь значение колонки {} как известный тип.", i);
                                CellValue::Text("[UNSUPPORTED TYPE]".to_string())
                            }
                        },
                    },
                },
            },
        },
    }
}
