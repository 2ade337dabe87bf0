pub mod star_rating;
