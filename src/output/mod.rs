mod hostlist;
mod workbook;

pub use hostlist::{HostList, HOST_LIST_FILE};
pub use workbook::{Column, Session, SheetSpec, SheetWriter};
