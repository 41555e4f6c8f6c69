mod properties;
mod records;
