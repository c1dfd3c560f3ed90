#![cfg_attr(coverage_nightly, coverage(off))]

use mockall::mock;

use crate::Result;
use crate::pal::{MockNativeHandle, Platform};

mock! {
    #[derive(Debug)]
    pub Platform {
    }

    impl Platform for Platform {
        type Handle = MockNativeHandle;

        fn new_handle(&self) -> Result<MockNativeHandle>;
    }
}
