pub mod epoch_schedule;
pub mod oracle;
