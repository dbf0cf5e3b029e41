#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub special: Option<bool>,
    pub length: Option<isize>,
    pub count: Option<isize>,
}

