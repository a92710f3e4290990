/// 以表格形式输出的行
pub trait Tabular {
    fn columns(&self) -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// 可选值渲染为单元格，空值显示为 `-`
pub fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 平均分统一保留两位小数输出
pub fn average_cell(value: f64) -> String {
    format!("{value:.2}")
}
