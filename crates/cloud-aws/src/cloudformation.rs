use async_stream::stream;
use aws_config::SdkConfig;
use aws_sdk_cloudformation::operation::list_stacks::ListStacksOutput;
use kubescout_cloud::{Pages, StackLister, StackPage, StackStatus, StackSummary};

use crate::Error;

/// Stack lister backed by AWS CloudFormation.
#[derive(Clone, Debug)]
pub struct CloudFormationStacks {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationStacks {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudformation::Client::new(config),
        }
    }
}

impl StackLister for CloudFormationStacks {
    type Error = Error;

    fn stack_pages(&self, status_filter: &[StackStatus]) -> Pages<StackSummary, Error> {
        let filter = status_filter
            .iter()
            .map(|status| aws_sdk_cloudformation::types::StackStatus::from(status.as_str()))
            .collect::<Vec<_>>();

        let mut pages = self
            .client
            .list_stacks()
            .set_stack_status_filter((!filter.is_empty()).then_some(filter))
            .into_paginator()
            .send();

        Box::pin(stream! {
            while let Some(page) = pages.next().await {
                match page {
                    Ok(output) => yield Ok(convert_page(output)),
                    Err(e) => {
                        yield Err(Error::CloudFormation(e.into()));
                        break;
                    }
                }
            }
        })
    }
}

fn convert_page(output: ListStacksOutput) -> StackPage {
    output
        .stack_summaries
        .unwrap_or_default()
        .into_iter()
        .map(|summary| StackSummary {
            status: StackStatus::from(summary.stack_status.as_str()),
            stack_id: summary.stack_id,
            stack_name: summary.stack_name,
            template_description: summary.template_description,
        })
        .collect()
}
