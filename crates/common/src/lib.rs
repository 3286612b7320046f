// gamepage-common: platform-free pieces of the launcher (entry path, window spec)

pub mod path;
pub mod window;
