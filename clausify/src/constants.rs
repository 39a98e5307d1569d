pub(crate) const RENAMED_HEADING: &str = "After Renaming Variables:";
