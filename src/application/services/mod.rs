mod articles;
mod magazines;

pub use articles::ArticleService;
pub use magazines::MagazineService;
