mod helpers;
mod refresh;
mod root;
