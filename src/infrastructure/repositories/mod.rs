pub mod articles;
pub mod magazines;

pub use articles::InMemoryArticleRepository;
pub use magazines::InMemoryMagazineRepository;
