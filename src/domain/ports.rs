/// Source of the two raw delimited strings the manifest is built from.
pub trait ConfigProvider {
    fn requires(&self) -> &str;
    fn repositories(&self) -> &str;
}
