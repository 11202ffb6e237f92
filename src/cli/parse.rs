use std::ffi::OsString;

use clap::Parser;

use super::CliFlags;

pub fn parse<I, T>(args: I) -> Result<CliFlags, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliFlags::try_parse_from(args)
}
