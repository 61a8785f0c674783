/// Value of `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookies.split("; ")
        .find(|row| row.starts_with(&prefix))
        .and_then(|row| row.split('=').nth(1))
        .map(str::to_string)
}

pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
