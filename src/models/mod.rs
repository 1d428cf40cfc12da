pub mod filter;
pub mod image;
pub mod movie;

pub use filter::{FilterChange, FilterOptions, FilterSet, SortBy};
pub use image::{ImageKind, ImageSize, ImageUrlBuilder};
pub use movie::{
    format_usd, CastMember, CrewMember, Genre, GenreList, Movie, MovieCredits, MovieDetails,
    MovieList, ProductionCompany, ProductionCountry, RatingTier, SpokenLanguage,
    MAIN_CAST_LIMIT, TOP_COMPANIES_LIMIT,
};
