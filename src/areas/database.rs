//! Object database (read side)
//!
//! Loose objects live under `.git/objects/<2>/<38>` as zlib streams. Every load
//! reads the file and inflates it again; nothing is cached.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::raw_object::RawObject;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read objects out of packfiles once pack indexes are supported
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Decompressed bytes of an object, or `None` if the store has no such object
    pub fn load(&self, object_id: &ObjectId) -> Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_path)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> Result<Option<RawObject>> {
        match self.load(object_id)? {
            Some(object_content) => Ok(Some(RawObject::decode(&object_content)?)),
            None => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Option<Commit>> {
        match self.parse_object(object_id)? {
            Some(object) => Ok(Some(Commit::parse(*object_id, object)?)),
            None => Ok(None),
        }
    }

    fn read_object(&self, object_path: PathBuf) -> Result<Option<Bytes>> {
        // read the object file
        let object_content = match std::fs::read(&object_path) {
            Ok(object_content) => object_content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no object at {}", object_path.display());
                return Ok(None);
            }
            Err(err) => return Err(Error::io(object_path, err)),
        };

        log::debug!(
            "loaded {} compressed bytes from {}",
            object_content.len(),
            object_path.display()
        );

        // decompress the object content
        let object_content =
            Self::decompress(object_content.into()).map_err(|err| Error::io(&object_path, err))?;

        Ok(Some(object_content))
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
