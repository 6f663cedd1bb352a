mod profiles;

pub use profiles::ProfileRepository;
