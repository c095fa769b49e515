//! Styling helpers that reflect a field's validation state

pub fn field_class(base: &str, error: Option<&str>) -> String {
    match error {
        Some(_) => format!("{base} input-invalid"),
        None => base.to_string(),
    }
}

pub fn field_style(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "border: 2px solid #ef4444; background-color: #fef2f2;",
        None => "",
    }
}
