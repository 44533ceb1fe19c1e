/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use pamqoi_pam::PamDecodeErrors;
use pamqoi_qoi::QoiEncodeErrors;

/// Everything that can stop the command line workflow
pub enum CmdErrors {
    IoError(std::io::Error),
    PamErrors(PamDecodeErrors),
    QoiErrors(QoiEncodeErrors),
    GenericString(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CmdErrors::IoError(err) => write!(f, "I/O error: {err}"),
            CmdErrors::PamErrors(err) => write!(f, "{err:?}"),
            CmdErrors::QoiErrors(err) => write!(f, "{err:?}"),
            CmdErrors::GenericString(err) => write!(f, "{err}")
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CmdErrors {}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::IoError(value)
    }
}

impl From<PamDecodeErrors> for CmdErrors {
    fn from(value: PamDecodeErrors) -> Self {
        CmdErrors::PamErrors(value)
    }
}

impl From<QoiEncodeErrors> for CmdErrors {
    fn from(value: QoiEncodeErrors) -> Self {
        CmdErrors::QoiErrors(value)
    }
}
