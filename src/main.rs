use anyhow::Result;
use data_exporter::config::ExportConfig;
use data_exporter::exporter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    println!("Переменные окружения загружены.");

    let config = ExportConfig::from_env();
    println!("Экспорт таблиц в Excel файлы...");

    exporter::run(&config).await
}
