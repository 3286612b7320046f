// Locating the bundled web entry point on disk.

pub mod entry;

pub use entry::{
    entry_path_in, entry_path_with, executable_dir, file_url, resolve_entry_path, EntryError,
    ENTRY_DIR, ENTRY_FILE,
};
