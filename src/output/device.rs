use crate::output::{PlainFormat, TableFormat};
use crate::types::DeviceEntry;

impl TableFormat for DeviceEntry {
    fn headers() -> Vec<&'static str> {
        vec!["SERIAL", "STATE", "MODEL", "PRODUCT", "TRANSPORT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.serial.clone(),
            self.state.to_string(),
            self.model().unwrap_or_default().to_string(),
            self.product().unwrap_or_default().to_string(),
            self.transport_id().unwrap_or_default().to_string(),
        ]
    }
}

impl PlainFormat for DeviceEntry {
    fn plain(&self) -> String {
        format!("{}\t{}", self.serial, self.state)
    }
}
