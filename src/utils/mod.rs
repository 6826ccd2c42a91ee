// Utility modules shared by services and the command-line front end

pub mod date;
