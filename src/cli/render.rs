use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use super::{Outcome, OutputFormat, RowSet};
use crate::errors::Result;

/// 渲染执行结果为终端输出文本
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match outcome {
        Outcome::Message(message) => Ok(message.clone()),
        Outcome::Rows(rows) => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows.json)?),
            OutputFormat::Table => Ok(render_table(rows)),
        },
    }
}

fn render_table(rows: &RowSet) -> String {
    if rows.is_empty() {
        return "No records found".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(rows.columns.clone());

    for row in &rows.rows {
        table.add_row(row.clone());
    }

    table.to_string()
}
