//! Profile page collaborators around the slideshow: form checks, greeting,
//! age calculator, skills filter, font and color customization, quotes and
//! the profile photo.

pub mod age;
pub mod customize;
pub mod greeting;
pub mod picture;
pub mod quotes;
pub mod skills;
pub mod validation;
