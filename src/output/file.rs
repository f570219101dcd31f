use crate::output::{PlainFormat, TableFormat};
use crate::types::{FileEntry, ForwardEntry, StorageEntry};

impl TableFormat for FileEntry {
    fn headers() -> Vec<&'static str> {
        vec!["PERMISSIONS", "OWNER", "GROUP", "SIZE", "DATE", "NAME"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.permissions.clone(),
            self.owner.clone(),
            self.group.clone(),
            self.size.clone(),
            self.date.clone(),
            self.name.clone(),
        ]
    }
}

impl PlainFormat for FileEntry {
    fn plain(&self) -> String {
        self.name.clone()
    }
}

impl TableFormat for StorageEntry {
    fn headers() -> Vec<&'static str> {
        vec!["FILESYSTEM", "SIZE", "USED", "AVAIL", "USE%", "MOUNTED ON"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.filesystem.clone(),
            self.size.clone(),
            self.used.clone(),
            self.available.clone(),
            self.use_percent.clone(),
            self.mounted_on.clone(),
        ]
    }
}

impl PlainFormat for StorageEntry {
    fn plain(&self) -> String {
        format!("{}\t{}\t{}", self.mounted_on, self.use_percent, self.available)
    }
}

impl TableFormat for ForwardEntry {
    fn headers() -> Vec<&'static str> {
        vec!["SERIAL", "LOCAL", "REMOTE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.serial.clone(), self.local.clone(), self.remote.clone()]
    }
}

impl PlainFormat for ForwardEntry {
    fn plain(&self) -> String {
        format!("{} {} {}", self.serial, self.local, self.remote)
    }
}
