//! Pages module
//! Full-screen views, one per `Screen`

mod discover;
mod downloads;
mod home;
mod library;
mod profile;

pub use discover::DiscoverPage;
pub use downloads::DownloadsPage;
pub use home::HomePage;
pub use library::LibraryPage;
pub use profile::ProfilePage;
