use std::path::Path;

use anyhow::Result;
use rust_xlsxwriter::Workbook;

use crate::db::{CellValue, TableData};

pub fn write_table(data: &TableData, sheet_name: &str, out_path: &Path) -> Result<()> {
    println!("Запись данных в Excel файл: {}", out_path.display());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, header) in data.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header.as_str())?;
    }

    for (r, row) in data.rows.iter().enumerate() {
        let row_idx = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let col_idx = c as u16;
            match cell {
                CellValue::Null => {}
                CellValue::Int(n) => {
                    worksheet.write_number(row_idx, col_idx, *n as f64)?;
                }
                CellValue::Real(f) => {
                    worksheet.write_number(row_idx, col_idx, *f)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_idx, col_idx, *b)?;
                }
                CellValue::DateTime(d) => {
                    worksheet.write_string(row_idx, col_idx, d.to_string().as_str())?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(row_idx, col_idx, s.as_str())?;
                }
                CellValue::Blob(b) => {
                    worksheet.write_string(row_idx, col_idx, String::from_utf8_lossy(b).as_ref())?;
                }
            }
        }
    }

    workbook.save(out_path)?;
    Ok(())
}
