use crate::utils::error::Result;

pub trait Storage {
    fn read_text(&self, path: &str) -> Result<String>;
    fn write_text(&self, path: &str, content: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn root(&self) -> &str;
    fn targets(&self) -> &[String];
    fn dry_run(&self) -> bool;
    fn atomic_writes(&self) -> bool;
}
