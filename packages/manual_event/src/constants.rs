// Nothing runs under our locks except standard library code, so a poisoned lock means the
// process is already in an unrecoverable state and we must not continue (we panic).
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - continued execution \
    is not safe because the event state can no longer be trusted";
