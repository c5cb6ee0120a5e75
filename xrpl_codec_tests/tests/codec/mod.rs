mod blob;
mod fields;
mod helpers;
mod path_set;
