#[cfg(test)]
mod common;

#[cfg(test)]
mod ride_table_tests;


#[cfg(test)]
mod issue_table_tests;

#[cfg(test)]
mod error_tests;

#[cfg(test)]
mod mutation_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod metrics_feed_tests;
