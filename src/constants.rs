pub const APP_NAME: &str = "OLCA_EXPLORER";
pub const DEFAULT_CONF: &str = "olca-explorer";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_REPORT_FILE: &str = "olca_database_contents.txt";
pub const DEFAULT_FLOWS_CSV: &str = "flows_export.csv";
pub const DEFAULT_PROCESSES_CSV: &str = "processes_export.csv";

pub const UNKNOWN_TYPE: &str = "Unknown";
pub const NO_CATEGORY: &str = "No category";

pub const IPC_SERVER_HINT: &str = "Tools > Developer tools > IPC Server > Start";
