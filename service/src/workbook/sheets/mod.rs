mod conventions;
mod coverage;
mod how_to_run;
mod test_cases;
