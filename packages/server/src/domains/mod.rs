// Business domains
pub mod coauthors;
pub mod outlet;
pub mod submissions;
pub mod votes;
