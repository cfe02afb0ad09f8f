use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Print the blob ID of a file's bytes
///
/// Nothing is written to the store, so no repository is needed.
pub fn hash_object(object_path: &Path, writer: &mut impl Write) -> anyhow::Result<()> {
    let object_data = std::fs::read(object_path)
        .with_context(|| format!("unable to read {}", object_path.display()))?;

    let object_id = ObjectId::derive(ObjectType::Blob, &object_data);

    writeln!(writer, "{object_id}")?;

    Ok(())
}
