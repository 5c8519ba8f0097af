use std::env;
use std::path::{Path, PathBuf};

// Таблица -> имя выходного файла в каталоге выгрузки.
const TABLE_TO_FILE: [(&str, &str); 3] = [
    ("abc", "ABC.xlsx"),
    ("fb", "FB.xlsx"),
    ("pcb", "PCB.xlsx"),
];

#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub table: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub db_path: PathBuf,
    pub targets: Vec<ExportTarget>,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        let db_path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "data.db".to_string());
        let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| "input".to_string());
        Self::with_paths(PathBuf::from(db_path), Path::new(&output_dir))
    }

    pub fn with_paths(db_path: PathBuf, output_dir: &Path) -> Self {
        let targets = TABLE_TO_FILE
            .iter()
            .map(|(table, file_name)| ExportTarget {
                table: (*table).to_string(),
                output_path: output_dir.join(file_name),
            })
            .collect();

        ExportConfig { db_path, targets }
    }
}
