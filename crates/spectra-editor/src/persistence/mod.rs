//! Saving and loading scenes
//!
//! [`SaveManager`] writes a [`spectra_core::SceneDocument`] plus a preview
//! image per save and lists or reads existing saves. Restoring a loaded
//! document into a scene is [`spectra_core::restore`].

mod capture;
mod saves;

pub use capture::{CaptureError, CaptureSink, PixelBuffer, SolidColorCapture, encode_png};
pub use saves::{
    DOCUMENT_SUFFIX, PREVIEW_SUFFIX, SaveEntry, SaveError, SaveManager, SaveReport,
    SessionContext, read_document,
};
