mod helpers;
mod presenter;
mod stub;
