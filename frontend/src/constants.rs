pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_SRC: &'static str = "src";
pub static PROP_ALT: &'static str = "alt";
pub static PROP_FOR: &'static str = "for";
pub static PROP_ID: &'static str = "id";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_OPTION: &'static str = "option";
pub static TAG_LABEL: &'static str = "label";

pub static APP_TITLE: &'static str = "FormNest";
