use dnslookup_domain::QueryFlag;

/// Read access to the lookup form. `None` means the control is not on the page.
pub trait FormControls: Send + Sync {
    fn domain(&self) -> Option<String>;
    fn record_type(&self) -> Option<String>;
    /// Raw value of the nameserver selector.
    fn nameserver(&self) -> Option<String>;
    fn custom_server(&self) -> Option<String>;
    fn ecs(&self) -> Option<String>;
    fn flag(&self, flag: QueryFlag) -> Option<bool>;
}
