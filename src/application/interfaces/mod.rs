/// Cities, streets and regions interface
pub mod geo;
/// Loyalty programs, checkins and combos interface
pub mod loyalty;
/// Courier mobile application interface
pub mod mobile;
/// Order service interface
pub mod order;
/// Organization service interface
pub mod organization;
/// OLAP reports, events journal and notices interface
pub mod report;
/// RMS and delivery settings interface
pub mod settings;
