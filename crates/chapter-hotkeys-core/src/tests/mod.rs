mod dialog;
mod support;
