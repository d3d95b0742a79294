mod extraction;
mod monday_export;
