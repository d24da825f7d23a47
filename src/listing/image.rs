/// Hard cap on photos per listing.
pub const MAX_LISTING_IMAGES: usize = 8;

/// An uploaded photo held as an opaque owned blob.
///
/// The bytes live exactly as long as the draft that owns them; dropping the
/// draft (or removing the image) releases them. Nothing in this crate decodes
/// or inspects the image contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Size of the stored blob in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
