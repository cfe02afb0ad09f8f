use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Pretty-print a commit in store format
    pub fn cat_file(&self, object_sha: &str, writer: &mut impl Write) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha)?;

        let object = self
            .read_object(&object_id)
            .with_context(|| format!("unable to read object {object_id}"))?
            .ok_or_else(|| anyhow::anyhow!("object not found: {object_id}"))?;
        let commit = Commit::parse(object_id, object)?;

        write!(writer, "{}", commit.display())?;

        Ok(())
    }
}
