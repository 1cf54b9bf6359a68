mod collection;
mod form;
mod table;
