use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the ID of the HEAD commit; nothing when there are no commits yet
    pub fn show_head(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        if let Some(head) = self.resolve_head()? {
            writeln!(writer, "{}", head.oid())?;
        }

        Ok(())
    }
}
