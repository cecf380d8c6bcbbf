use ringtrack::core::io::report::ReportHeader;

pub struct DefaultsConfig {
    pub tool: String,
    pub organization: String,
    pub contact: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let header = ReportHeader::default();
        Self {
            tool: header.tool,
            organization: header.organization,
            contact: header.contact,
        }
    }
}
