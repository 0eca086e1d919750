mod datetime;
mod flow;
