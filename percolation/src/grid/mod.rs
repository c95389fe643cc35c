mod percolation;
mod site;

pub use percolation::Percolation;
pub use site::Site;
