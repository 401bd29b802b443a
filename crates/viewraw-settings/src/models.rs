/// Settings row, as stored. Values are kept as text and parsed by the
/// caller that knows the option's type.
pub struct SettingRow {
    pub plugin: String,
    pub key: String,
    pub value: String,
    pub updated_at: String,
}
